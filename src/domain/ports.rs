use crate::domain::model::ClientCollection;
use crate::utils::error::Result;

/// Turns a client list into a finished report. Implementations must not
/// depend on anything but the records they are given.
pub trait ReportRenderer: Send + Sync {
    fn generate(&self, clients: &ClientCollection) -> String;
}

impl<R: ReportRenderer + ?Sized> ReportRenderer for Box<R> {
    fn generate(&self, clients: &ClientCollection) -> String {
        (**self).generate(clients)
    }
}

/// Persists a rendered report under a named path.
pub trait Storage: Send + Sync {
    fn write_string(
        &self,
        path: &str,
        content: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
