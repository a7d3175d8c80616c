use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Representa a una persona dentro del sistema (director o guionista).
///
/// Una persona no tiene identificador propio: su identidad es su valor.
/// Dos `Person` son la misma persona si coinciden nombre y fecha de
/// nacimiento. Esto permite comparar créditos entre películas sin mantener
/// un registro central de personas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
  /// Nombre completo de la persona, tal como aparece en los créditos.
  pub name: String,

  /// Fecha de nacimiento. `NaiveDate` da un orden total, necesario para
  /// ordenar películas por la edad de sus directores.
  pub date_of_birth: NaiveDate,
}

impl Person {
  pub fn new(name: impl Into<String>, date_of_birth: NaiveDate) -> Self {
    Person { name: name.into(), date_of_birth }
  }
}

impl fmt::Display for Person {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name)
  }
}
