//! Request URL construction.

use url::Url;

use crate::client::decision::ConsentDecision;
use crate::config::ConfirmationPath;
use crate::error::{BankingError, BankingResult};

/// Builds the backend URLs for every operation from one base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
    confirmation: ConfirmationPath,
}

impl Endpoints {
    /// Parse `base_url`; any path it carries is kept as a prefix.
    pub fn new(base_url: &str, confirmation: ConfirmationPath) -> BankingResult<Self> {
        let mut base = Url::parse(base_url.trim())?;
        if base.cannot_be_a_base() {
            return Err(BankingError::InvalidArgument(format!(
                "base URL '{}' cannot carry request paths",
                base_url
            )));
        }
        base.set_query(None);
        base.set_fragment(None);
        Ok(Self { base, confirmation })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn confirmation_path(&self) -> ConfirmationPath {
        self.confirmation
    }

    /// `{base}{confirmation}/`
    pub fn tan_confirmation(&self) -> Url {
        self.with_path(&format!("{}/", self.confirmation.as_str()))
    }

    /// `{base}{confirmation}/consent?decision={decision}`
    pub fn consent(&self, decision: ConsentDecision) -> Url {
        let mut url = self.with_path(&format!("{}/consent", self.confirmation.as_str()));
        url.query_pairs_mut().append_pair("decision", decision.as_str());
        url
    }

    /// `{base}/payments/{payment_id}`, the id encoded as exactly one segment.
    pub fn single_payment(&self, payment_id: &str) -> Url {
        let mut url = self.with_path("/payments");
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(payment_id);
        }
        url
    }

    fn with_path(&self, suffix: &str) -> Url {
        let mut url = self.base.clone();
        let path = format!("{}{}", self.base.path().trim_end_matches('/'), suffix);
        url.set_path(&path);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints(base: &str) -> Endpoints {
        Endpoints::new(base, ConfirmationPath::Payment).unwrap()
    }

    #[test]
    fn test_tan_confirmation_keeps_trailing_slash() {
        let url = endpoints("http://bank.local:28080").tan_confirmation();
        assert_eq!(url.as_str(), "http://bank.local:28080/payment/confirmation/");
    }

    #[test]
    fn test_base_path_prefix_preserved() {
        let url = endpoints("http://bank.local/mock/").tan_confirmation();
        assert_eq!(url.as_str(), "http://bank.local/mock/payment/confirmation/");
    }

    #[test]
    fn test_consent_query() {
        let url = endpoints("http://bank.local").consent(ConsentDecision::Accepted);
        assert_eq!(url.as_str(), "http://bank.local/payment/confirmation/consent?decision=ACCEPTED");
    }

    #[test]
    fn test_view_prefix() {
        let e = Endpoints::new("http://bank.local", ConfirmationPath::View).unwrap();
        assert_eq!(e.tan_confirmation().path(), "/view/payment/confirmation/");
        assert_eq!(e.consent(ConsentDecision::Rejected).query(), Some("decision=REJECTED"));
    }

    #[test]
    fn test_single_payment_is_one_segment() {
        let e = endpoints("http://bank.local");
        assert_eq!(e.single_payment("p1").path(), "/payments/p1");
        assert_eq!(e.single_payment("a/b?c").path(), "/payments/a%2Fb%3Fc");
    }

    #[test]
    fn test_base_query_dropped() {
        let url = endpoints("http://bank.local/?x=1").single_payment("p1");
        assert_eq!(url.as_str(), "http://bank.local/payments/p1");
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(Endpoints::new("mailto:bank@example.com", ConfirmationPath::Payment).is_err());
        assert!(matches!(
            Endpoints::new("not a url", ConfirmationPath::Payment),
            Err(BankingError::InvalidUrl(_))
        ));
    }
}
