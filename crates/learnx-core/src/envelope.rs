//! The uniform response wrapper used by every admin API endpoint.

use crate::error::{AdminError, Result};
use serde::{Deserialize, Serialize};

/// `{ success, code, message, data }` as returned by the LearnX API.
///
/// Callers must check `success` before trusting `data`; [`Envelope::into_data`]
/// does exactly that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Builds a successful envelope, mostly useful in tests and fakes.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            code: Some(200),
            message: None,
            data: Some(data),
            error: None,
        }
    }

    /// Returns the payload when the call succeeded and carried data.
    pub fn into_data(self) -> Result<T> {
        if !self.success {
            return Err(self.failure_error());
        }
        match self.data {
            Some(data) => Ok(data),
            None => Err(AdminError::envelope(
                self.code,
                "response reported success but carried no data",
            )),
        }
    }

    /// Checks `success` for endpoints whose payload the client ignores.
    pub fn into_unit(self) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(self.failure_error())
        }
    }

    fn failure_error(&self) -> AdminError {
        let message = self
            .error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "request was not successful".to_string());
        AdminError::envelope(self.code, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_envelope_yields_data() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"code":200,"message":"ok","data":[1,2]}"#)
                .unwrap();
        assert_eq!(env.into_data().unwrap(), vec![1, 2]);
    }

    #[test]
    fn failed_envelope_is_a_business_error() {
        let env: Envelope<Vec<u32>> = serde_json::from_str(
            r#"{"success":false,"code":403,"message":"forbidden","data":null}"#,
        )
        .unwrap();
        assert_eq!(
            env.into_data().unwrap_err(),
            AdminError::envelope(Some(403), "forbidden")
        );
    }

    #[test]
    fn error_field_takes_precedence_over_message() {
        let env: Envelope<()> = serde_json::from_str(
            r#"{"success":false,"message":"Bad request","error":"email taken"}"#,
        )
        .unwrap();
        assert_eq!(
            env.into_unit().unwrap_err(),
            AdminError::envelope(None, "email taken")
        );
    }

    #[test]
    fn success_without_data_is_rejected_for_typed_payloads() {
        let env: Envelope<String> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(env.into_data(), Err(AdminError::Envelope { .. })));
    }

    #[test]
    fn unit_endpoints_only_check_success() {
        let env: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":true,"code":200,"message":"done"}"#).unwrap();
        assert!(env.into_unit().is_ok());
    }
}
