use crate::error::RiskError;
use crate::models::signal::{AuthorCommits, ChangeEvent, FileSignal};
use std::future::Future;
use std::path::PathBuf;

/// Source of per-file signals. Called once per pipeline run.
pub trait SignalProvider {
    fn load_signals(&self) -> impl Future<Output = Result<Vec<FileSignal>, RiskError>> + Send;
}

/// In-memory provider. `Default` yields the built-in synthetic dataset.
#[derive(Debug, Clone)]
pub struct MockSignalProvider {
    signals: Vec<FileSignal>,
}

impl MockSignalProvider {
    pub fn new(signals: Vec<FileSignal>) -> Self {
        Self { signals }
    }

    pub fn signals(&self) -> &[FileSignal] {
        &self.signals
    }
}

impl Default for MockSignalProvider {
    fn default() -> Self {
        Self::new(synthetic_signals())
    }
}

impl SignalProvider for MockSignalProvider {
    fn load_signals(&self) -> impl Future<Output = Result<Vec<FileSignal>, RiskError>> + Send {
        let signals = self.signals.clone();
        async move { Ok(signals) }
    }
}

/// Reads a JSON array of `FileSignal` from disk on every load.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SignalProvider for JsonFileProvider {
    fn load_signals(&self) -> impl Future<Output = Result<Vec<FileSignal>, RiskError>> + Send {
        let path = self.path.clone();
        async move {
            let raw = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| RiskError::Provider(format!("Failed to read {}: {e}", path.display())))?;
            let signals: Vec<FileSignal> = serde_json::from_str(&raw)
                .map_err(|e| RiskError::Provider(format!("Malformed signal file {}: {e}", path.display())))?;
            log::info!("loaded {} signals from {}", signals.len(), path.display());
            Ok(signals)
        }
    }
}

/// Provider picked from settings: a signal file when configured, otherwise the mock set.
#[derive(Debug, Clone)]
pub enum ConfiguredProvider {
    Mock(MockSignalProvider),
    File(JsonFileProvider),
}

impl SignalProvider for ConfiguredProvider {
    fn load_signals(&self) -> impl Future<Output = Result<Vec<FileSignal>, RiskError>> + Send {
        let this = self.clone();
        async move {
            match this {
                ConfiguredProvider::Mock(mock) => mock.load_signals().await,
                ConfiguredProvider::File(file) => file.load_signals().await,
            }
        }
    }
}

fn mock_file(
    id: &str,
    name: &str,
    path: &str,
    complexity: f64,
    historical_bugs: u32,
    days_ago: &[u32],
    authors: &[(&str, u32)],
) -> FileSignal {
    FileSignal {
        id: id.to_string(),
        name: name.to_string(),
        path: path.to_string(),
        complexity,
        historical_bugs,
        change_history: days_ago.iter().copied().map(ChangeEvent::new).collect(),
        authors: authors
            .iter()
            .map(|(name, commits)| AuthorCommits::new(*name, *commits))
            .collect(),
    }
}

/// Fixed synthetic repository used when no signal file is configured.
pub fn synthetic_signals() -> Vec<FileSignal> {
    vec![
        mock_file(
            "1",
            "AuthService.ts",
            "src/services/AuthService.ts",
            85.0,
            12,
            &[1, 3, 5, 8, 12, 15, 22, 40, 75],
            &[("Sarah Chen", 30), ("Mike Ross", 28), ("Alex Kim", 25)],
        ),
        mock_file(
            "2",
            "PaymentProcessor.ts",
            "src/services/PaymentProcessor.ts",
            92.0,
            18,
            &[0, 1, 2, 4, 6, 9, 11, 14, 18, 21, 27, 33, 50],
            &[("Mike Ross", 14), ("Priya Patel", 13), ("Alex Kim", 12), ("Jordan Lee", 11)],
        ),
        mock_file(
            "3",
            "UserController.ts",
            "src/controllers/UserController.ts",
            45.0,
            3,
            &[4, 19, 28, 60],
            &[("Sarah Chen", 40), ("Jordan Lee", 10)],
        ),
        mock_file(
            "4",
            "Logger.ts",
            "src/utils/Logger.ts",
            15.0,
            0,
            &[120, 200],
            &[("Alex Kim", 22)],
        ),
        mock_file(
            "5",
            "DatabaseAdapter.ts",
            "src/infra/DatabaseAdapter.ts",
            70.0,
            8,
            &[2, 7, 13, 26, 31, 45],
            &[("Priya Patel", 18), ("Mike Ross", 17), ("Sarah Chen", 5)],
        ),
        mock_file(
            "6",
            "formatters.ts",
            "src/utils/formatters.ts",
            20.0,
            1,
            &[10, 90],
            &[("Jordan Lee", 9), ("Alex Kim", 1)],
        ),
        mock_file(
            "7",
            "ApiGateway.ts",
            "src/gateway/ApiGateway.ts",
            60.0,
            5,
            &[3, 9, 16, 24, 30],
            &[("Sarah Chen", 12), ("Priya Patel", 12), ("Mike Ross", 6)],
        ),
        mock_file(
            "8",
            "config.ts",
            "src/config.ts",
            10.0,
            0,
            &[180],
            &[("Jordan Lee", 4), ("Sarah Chen", 0)],
        ),
    ]
}
