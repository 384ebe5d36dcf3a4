use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct PropositionMessageValidator {
    #[validate(length(min = 1, max = 2000, message = "text must be 1 to 2000 characters"))]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_need_text() {
        let empty: PropositionMessageValidator = serde_json::from_str(r#"{"text":""}"#).unwrap();
        assert!(empty.validate().is_err());

        let message: PropositionMessageValidator =
            serde_json::from_str(r#"{"text":"Livraison vers 18h"}"#).unwrap();
        assert!(message.validate().is_ok());
    }
}
