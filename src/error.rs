use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("No hay token de API configurado. Define CANVAS_API_TOKEN (o TOKEN) o ejecuta `attendance-report config --set-token TU_TOKEN`")]
    MissingApiToken,

    #[error("Archivo no encontrado: {0}")]
    FileNotFound(String),

    #[error("Tipo de archivo no soportado: {0} (usa .csv o .xlsx)")]
    UnsupportedFileType(String),

    #[error("No se encontró la columna \"{column}\" en el archivo. Columnas disponibles: {available}")]
    MissingColumn { column: String, available: String },

    #[error("Error leyendo CSV: {0}")]
    CsvRead(#[from] csv::Error),

    #[error("Error leyendo Excel: {0}")]
    ExcelRead(String),

    #[error("Error de conexión con la API: {0}")]
    ApiCall(String),

    #[error("La API respondió {status} para {url}: {body}")]
    ApiStatus { status: u16, url: String, body: String },

    #[error("Respuesta de la API inválida: {0}")]
    ApiParse(String),

    #[error("Ruta de salida inválida: {0} (usa un directorio existente o un archivo .xlsx)")]
    InvalidOutputPath(String),

    #[error("Error generando Excel: {0}")]
    ExcelGeneration(String),

    #[error("Error en la revisión interactiva: {0}")]
    Prompt(String),

    #[error("Error de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Error de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] attendance_common::Error),
}

impl From<reqwest::Error> for ReportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ReportError::ApiParse(err.to_string())
        } else {
            ReportError::ApiCall(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
