use crate::schema::FinquizConfig;

use super::helpers::{validate_not_blank, validate_range};

pub(crate) fn validate_server(errors: &mut Vec<String>, config: &FinquizConfig) {
    validate_not_blank(errors, "server.host", &config.server.host);
    validate_range(errors, "server.port", u64::from(config.server.port), 1, 65535);
}
