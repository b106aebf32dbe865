use dioxus::prelude::*;

use crate::{
    engine::classify::{build_view, GenericTable, InvoiceRow, ResponseView},
    ui::uploads::SessionHandle,
    util,
};

#[component]
pub fn ResponseSection() -> Element {
    let session = use_context::<SessionHandle>();
    let view = build_view(session.0.read().attempts());

    match view {
        ResponseView::Empty => rsx! {},
        ResponseView::Invoice(rows) => rsx! {
            InvoiceTable { rows }
        },
        ResponseView::Generic(table) => rsx! {
            GenericTableView { table }
        },
    }
}

#[component]
fn InvoiceTable(rows: Vec<InvoiceRow>) -> Element {
    let count = rows.len();

    rsx! {
        div { class: "response",
            h2 { "Invoice Data" }
            p { class: "section-hint", "Extracted invoice information from uploaded documents." }
            table { class: "data-table",
                thead {
                    tr {
                        th { "Invoice ID" }
                        th { "Vendor" }
                        th { "Customer" }
                        th { "Invoice Date" }
                        th { "Due Date" }
                        th { "Subtotal" }
                        th { "Tax" }
                        th { "Total" }
                        th { "Currency" }
                        th { "File" }
                        th { "Uploaded" }
                    }
                }
                tbody {
                    for row in rows.iter() {
                        {
                            let cells = row.display_cells();
                            let file_name = row.file_name.clone();
                            let when = util::format_time(row.submitted_at);
                            rsx! {
                                tr {
                                    for cell in cells.iter() {
                                        td { "{cell}" }
                                    }
                                    td { class: "file-cell", "{file_name}" }
                                    td { class: "time-cell", "{when}" }
                                }
                            }
                        }
                    }
                }
            }
            p { class: "section-footer", "{count} invoice(s) extracted successfully" }
        }
    }
}

#[component]
fn GenericTableView(table: GenericTable) -> Element {
    let count = table.rows.len();

    rsx! {
        div { class: "response",
            h2 { "Response Data" }
            p { class: "section-hint", "Webhook responses for successful uploads." }
            table { class: "data-table",
                thead {
                    tr {
                        th { "File" }
                        th { "Upload Time" }
                        for column in table.columns.iter() {
                            th { "{column}" }
                        }
                    }
                }
                tbody {
                    for row in table.rows.iter() {
                        {
                            let when = util::format_time(row.submitted_at);
                            rsx! {
                                tr {
                                    td { class: "file-cell", "{row.file_name}" }
                                    td { class: "time-cell", "{when}" }
                                    for cell in row.cells.iter() {
                                        td {
                                            code { "{cell}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            p { class: "section-footer", "{count} successful upload(s) with responses" }
        }
    }
}
