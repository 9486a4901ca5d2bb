use crate::core::{ClientCollection, ReportRenderer, Storage};
use crate::utils::error::Result;
use std::time::Instant;

/// Renders a report with whichever renderer it is handed and persists the
/// result through its storage. It knows nothing about report formats.
pub struct ReportWriter<S: Storage> {
    storage: S,
}

impl<S: Storage> ReportWriter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn render<R: ReportRenderer + ?Sized>(
        &self,
        renderer: &R,
        clients: &ClientCollection,
    ) -> String {
        renderer.generate(clients)
    }

    /// Single write, no retry. A failed write is logged and returned; the
    /// clients and the renderer are left as they were.
    pub async fn save<R: ReportRenderer + ?Sized>(
        &self,
        renderer: &R,
        clients: &ClientCollection,
        path: &str,
    ) -> Result<()> {
        tracing::info!("Saving report to {}...", path);
        let started = Instant::now();

        let report = self.render(renderer, clients);
        tracing::debug!(
            "Rendered {} clients into {} bytes",
            clients.len(),
            report.len()
        );

        match self.storage.write_string(path, &report).await {
            Ok(()) => {
                tracing::info!(
                    "Report saved to {} ({} bytes) in {:?}",
                    path,
                    report.len(),
                    started.elapsed()
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!("Saving report failed after {:?}: {}", started.elapsed(), e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::renderers::{HtmlRenderer, ReportFormat, TextRenderer};
    use crate::core::ClientRecord;
    use crate::utils::error::ReportError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, String>>>,
        fail: bool,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }

        async fn get_file(&self, path: &str) -> Option<String> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_string(&self, path: &str, content: &str) -> Result<()> {
            if self.fail {
                return Err(ReportError::persistence(
                    path,
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
                ));
            }
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), content.to_string());
            Ok(())
        }
    }

    fn sample_clients() -> ClientCollection {
        let mut clients = ClientCollection::new();
        clients.add(ClientRecord::new("Client 1", "Prueba address"));
        clients.add(ClientRecord::new("Client 2", "Prueba address 2"));
        clients
    }

    #[tokio::test]
    async fn test_save_text_report() {
        let storage = MockStorage::new();
        let writer = ReportWriter::new(storage.clone());

        writer
            .save(&TextRenderer::new(), &sample_clients(), "report.txt")
            .await
            .unwrap();

        assert_eq!(
            storage.get_file("report.txt").await.unwrap(),
            "Name: Client 1 Address: Prueba address\nName: Client 2 Address: Prueba address 2\n"
        );
    }

    #[tokio::test]
    async fn test_save_with_any_renderer() {
        let storage = MockStorage::new();
        let writer = ReportWriter::new(storage.clone());
        let clients = sample_clients();

        for format in [ReportFormat::Text, ReportFormat::Html] {
            let renderer = format.renderer();
            let path = format.default_file_name();
            writer.save(renderer.as_ref(), &clients, &path).await.unwrap();
            assert_eq!(
                storage.get_file(&path).await.unwrap(),
                renderer.generate(&clients)
            );
        }
    }

    struct CsvRenderer;

    impl ReportRenderer for CsvRenderer {
        fn generate(&self, clients: &ClientCollection) -> String {
            clients
                .iter()
                .map(|c| format!("{},{}\n", c.name(), c.address()))
                .collect()
        }
    }

    #[tokio::test]
    async fn test_new_renderer_needs_no_writer_changes() {
        let storage = MockStorage::new();
        let writer = ReportWriter::new(storage.clone());

        writer
            .save(&CsvRenderer, &sample_clients(), "report.csv")
            .await
            .unwrap();

        assert_eq!(
            storage.get_file("report.csv").await.unwrap(),
            "Client 1,Prueba address\nClient 2,Prueba address 2\n"
        );
    }

    #[tokio::test]
    async fn test_save_failure_is_returned_not_raised() {
        let writer = ReportWriter::new(MockStorage::failing());
        let clients = sample_clients();
        let before = clients.clone();

        let result = writer
            .save(&HtmlRenderer::new(), &clients, "locked/report.html")
            .await;

        let err = result.unwrap_err();
        assert!(err.is_persistence());
        assert!(err.to_string().contains("locked/report.html"));
        assert_eq!(clients, before);
        assert!(writer.storage().get_file("locked/report.html").await.is_none());
    }

    #[test]
    fn test_render_matches_generate() {
        let writer = ReportWriter::new(MockStorage::new());
        let clients = sample_clients();
        assert_eq!(
            writer.render(&HtmlRenderer::new(), &clients),
            HtmlRenderer::new().generate(&clients)
        );
    }
}
