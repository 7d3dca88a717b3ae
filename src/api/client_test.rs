#[cfg(test)]
mod tests {
    use crate::api::client::{DirectoryClient, FetchError, interpret_response};
    use reqwest::StatusCode;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn sample_body() -> &'static str {
        r#"{"patients":[
            {"id":"00000001","firstName":"John","lastName":"Doe","dateOfBirth":"1990-01-01","dateOfRegistration":"2023-05-14"},
            {"id":"00000002","firstName":"Jane","lastName":"Smith","dateOfBirth":"1985-07-23","dateOfRegistration":"2022-11-02"}
        ]}"#
    }

    #[test]
    fn test_interpret_success_body() {
        let patients = interpret_response(StatusCode::OK, sample_body().as_bytes()).unwrap();

        assert_eq!(patients.len(), 2);
        assert_eq!(patients[0].id, "00000001");
        assert_eq!(patients[0].first_name, "John");
        assert_eq!(patients[1].display_name(), "Jane Smith");
    }

    #[test]
    fn test_interpret_empty_directory() {
        let patients = interpret_response(StatusCode::OK, br#"{"patients":[]}"#).unwrap();
        assert!(patients.is_empty());
    }

    #[test]
    fn test_interpret_failure_status_ignores_body() {
        // The body is never parsed on a failure status
        let err =
            interpret_response(StatusCode::INTERNAL_SERVER_ERROR, b"not json at all").unwrap_err();

        assert_eq!(err, FetchError::Status);
        assert_eq!(err.to_string(), "Failed to fetch patients");
    }

    #[test]
    fn test_interpret_any_failure_status_maps_the_same() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::NOT_FOUND,
            StatusCode::SERVICE_UNAVAILABLE,
        ] {
            let err = interpret_response(status, &[]).unwrap_err();
            assert_eq!(err.to_string(), "Failed to fetch patients");
        }
    }

    #[test]
    fn test_interpret_malformed_body_is_transport_error() {
        let err = interpret_response(StatusCode::OK, b"{\"patients\": 42}").unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[test]
    fn test_transport_error_keeps_underlying_message() {
        let err = FetchError::Transport("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Failed to fetch");
    }

    #[test]
    fn test_unknown_error_message() {
        assert_eq!(FetchError::Unknown.to_string(), "Unknown error");
    }

    /// Serve exactly one canned HTTP response and hand back the raw
    /// request that arrived, so tests can assert on method and path.
    fn serve_once(response: String) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}"), handle)
    }

    #[test]
    fn test_fetch_issues_one_get_to_patients_path() {
        let body = sample_body();
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let (url, handle) = serve_once(response);

        let client = DirectoryClient::new(url);
        let patients = client.fetch_patients().unwrap();

        assert_eq!(patients.len(), 2);

        let request = handle.join().unwrap();
        assert!(
            request.starts_with("GET /api/patients HTTP/1.1\r\n"),
            "unexpected request line: {request}"
        );
    }

    #[test]
    fn test_fetch_failure_status_maps_to_fixed_message() {
        let response =
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                .to_string();
        let (url, handle) = serve_once(response);

        let client = DirectoryClient::new(url);
        let err = client.fetch_patients().unwrap_err();

        assert_eq!(err, FetchError::Status);
        assert_eq!(err.to_string(), "Failed to fetch patients");
        handle.join().unwrap();
    }

    #[test]
    fn test_fetch_transport_error_when_unreachable() {
        // Bind then drop to find a port nothing is listening on
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = DirectoryClient::new(format!("http://{addr}"));
        let err = client.fetch_patients().unwrap_err();

        assert!(matches!(
            err,
            FetchError::Transport(_) | FetchError::Unknown
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_is_tolerated() {
        let body = r#"{"patients":[]}"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let (url, handle) = serve_once(response);

        let client = DirectoryClient::new(format!("{url}/"));
        client.fetch_patients().unwrap();

        let request = handle.join().unwrap();
        assert!(request.starts_with("GET /api/patients HTTP/1.1\r\n"));
    }
}
