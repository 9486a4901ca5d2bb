use crate::core::{ClientCollection, ClientRecord};
use crate::utils::error::{ReportError, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Client list as stored on disk:
///
/// ```toml
/// [[clients]]
/// name = "Client 1"
/// address = "Prueba address"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientsFile {
    #[serde(default)]
    pub clients: Vec<ClientRecord>,
}

impl ClientsFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReportError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| ReportError::ConfigParseError {
            message: e.to_string(),
        })
    }

    pub fn into_collection(self) -> ClientCollection {
        self.clients.into_iter().collect()
    }
}

/// Replaces `${VAR}` with the variable's value. Unset variables stay as written.
fn substitute_env_vars(content: &str) -> String {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

    re.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

/// The two clients the report demo ships with.
pub fn sample_clients() -> ClientCollection {
    let mut clients = ClientCollection::new();
    clients.add(ClientRecord::new("Client 1", "Prueba address"));
    clients.add(ClientRecord::new("Client 2", "Prueba address 2"));
    clients
}
