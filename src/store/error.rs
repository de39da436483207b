use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Clé '{0}' déjà présente mais pas une collection")]
    NotACollection(String),

    #[error("Fichier de données illisible: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document JSON invalide: {0}")]
    Json(#[from] serde_json::Error),
}
