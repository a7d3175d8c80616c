// crates/filmoteca-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de Filmoteca.
///
/// Las capas superiores (CLI, UI, etc.) deberían mapear este error
/// a mensajes de usuario o logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
  /// La consulta necesita al menos una película y el catálogo está vacío.
  #[error("the catalog contains no movies")]
  EmptyCatalog,
}
