//! Verify target resolution, request building and response parsing against
//! JSON test vectors stored in `test-vectors/`.
//!
//! Request vectors pin the exact wire text, so any change to header order,
//! spacing or encoding shows up here first.

use rawhttp_core::{resolve_target, ClientError, HttpClient, HttpMethod};

/// Read an optional `[[key, value], ...]` form from a vector case.
fn parse_args(value: &serde_json::Value) -> Option<Vec<(String, String)>> {
    let pairs = value.as_array()?;
    Some(
        pairs
            .iter()
            .map(|pair| {
                let arr = pair.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = HttpClient::new();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let url = case["url"].as_str().unwrap();

        // Verify target
        let target = resolve_target(url).unwrap();
        let expected = &case["expected_target"];
        assert_eq!(target.host, expected["host"].as_str().unwrap(), "{name}: host");
        assert_eq!(u64::from(target.port), expected["port"].as_u64().unwrap(), "{name}: port");
        assert_eq!(target.path, expected["path"].as_str().unwrap(), "{name}: path");

        // Verify wire text
        let args = parse_args(&case["args"]);
        let req = match HttpMethod::from_command(case["method"].as_str().unwrap()) {
            HttpMethod::Get => c.build_get(&target),
            HttpMethod::Post => c.build_post(&target, args.as_deref()),
        };
        assert_eq!(req.to_wire(), case["expected_wire"].as_str().unwrap(), "{name}: wire");

        if let Some(body) = &req.body {
            let declared = req
                .headers
                .iter()
                .find(|(header, _)| header == "Content-Length")
                .map(|(_, value)| value.parse::<usize>().unwrap());
            assert_eq!(declared, Some(body.len()), "{name}: content length");
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = HttpClient::new();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let result = c.parse_response(case["raw"].as_str().unwrap());

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "MalformedResponse" => assert!(
                    matches!(err, ClientError::MalformedResponse(_)),
                    "{name}: expected MalformedResponse"
                ),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let parsed = serde_json::to_value(result.unwrap()).unwrap();
            assert_eq!(parsed, case["expected_result"], "{name}: parsed result");
        }
    }
}
