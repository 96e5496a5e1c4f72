use serde::{Deserialize, Serialize};

/// Body of an analysis submission: `{"type":"bytecode","contract":…}`.
#[derive(Debug, Serialize)]
pub struct AnalysisRequest<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub contract: &'a str,
}

impl<'a> AnalysisRequest<'a> {
    pub const BYTECODE: &'static str = "bytecode";

    #[must_use]
    pub fn bytecode(contract: &'a str) -> Self {
        Self {
            kind: Self::BYTECODE,
            contract,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Error {
    pub error: String,
}

/// Successful submission response: `{"result":"Queued","uuid":…}`.
#[derive(Debug, Deserialize)]
pub struct AnalysisDispatch {
    pub result: String,
    pub uuid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_request_wire_format() {
        let request = AnalysisRequest::bytecode("0x6060");
        let serialized = serde_json::to_string(&request).unwrap();
        assert_eq!(serialized, r#"{"type":"bytecode","contract":"0x6060"}"#);
    }

    #[test]
    fn test_analysis_dispatch_deserialization() {
        let dispatch: AnalysisDispatch =
            serde_json::from_str(r#"{"result":"Queued","uuid":"my-uuid"}"#).unwrap();
        assert_eq!(dispatch.result, "Queued");
        assert_eq!(dispatch.uuid, "my-uuid");
    }

    #[test]
    fn test_error_body_deserialization() {
        let error: Error = serde_json::from_str(r#"{"error":"request limit exceeded"}"#).unwrap();
        assert_eq!(error.error, "request limit exceeded");
    }
}
