//! One-shot localhost HTTP responder for transport tests.

use std::{
	io::{Read, Write},
	net::{TcpListener, TcpStream},
	thread,
};

/// Serve exactly one HTTP exchange on a random local port and return the
/// endpoint URL to POST to.
pub fn one_shot_server(status_line: &'static str, body: &'static str) -> String {
	let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
	let addr = listener.local_addr().expect("listener addr");
	thread::spawn(move || {
		let (mut stream, _) = listener.accept().expect("accept");
		read_request(&mut stream);
		let response = format!(
			"HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
			body.len()
		);
		stream.write_all(response.as_bytes()).expect("write response");
	});
	format!("http://{addr}/webhook-test/upload")
}

/// An address nothing listens on: bind an ephemeral port, then drop it.
pub fn unreachable_endpoint() -> String {
	let addr = TcpListener::bind("127.0.0.1:0")
		.expect("bind")
		.local_addr()
		.expect("addr");
	format!("http://{addr}/webhook-test/upload")
}

/// Drain headers plus the Content-Length body so the client finishes writing
/// before we respond.
fn read_request(stream: &mut TcpStream) {
	let mut data = Vec::new();
	let mut buf = [0u8; 4096];
	let header_end = loop {
		let n = stream.read(&mut buf).expect("read request");
		if n == 0 {
			break data.len();
		}
		data.extend_from_slice(&buf[..n]);
		if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
			break pos + 4;
		}
	};
	let headers = String::from_utf8_lossy(&data[..header_end]).to_lowercase();
	let content_length = headers
		.lines()
		.find_map(|line| line.strip_prefix("content-length:"))
		.and_then(|v| v.trim().parse::<usize>().ok())
		.unwrap_or(0);
	while data.len() < header_end + content_length {
		let n = stream.read(&mut buf).expect("read body");
		if n == 0 {
			break;
		}
		data.extend_from_slice(&buf[..n]);
	}
}
