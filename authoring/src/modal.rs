/// The two dialog shapes the dashboard uses: a blocking, dismiss-only error
/// and a success notice with one or two actions.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Error {
        title: String,
        message: String,
    },
    Success {
        message: String,
        /// Offers the "Add Another" action alongside "OK", reopening the
        /// dialog that produced the notice.
        offer_add_another: bool,
    },
}

impl Modal {
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Modal::Error {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>, offer_add_another: bool) -> Self {
        Modal::Success {
            message: message.into(),
            offer_add_another,
        }
    }
}
