use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::genre::Genre;
use super::person::Person;

/// Representa una película dentro del catálogo.
///
/// Una `Movie` agrupa los datos editoriales básicos de un film:
/// - título,
/// - duración en minutos,
/// - año de estreno,
/// - géneros,
/// - créditos de dirección y guion.
///
/// Es un registro de solo datos: las operaciones de consulta sobre
/// colecciones de películas viven en
/// [`crate::services::MovieQueryService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
  /// Título de la película tal como aparece oficialmente.
  pub title: String,

  /// Duración total en minutos.
  pub length: u32,

  /// Año de estreno. Se deja con signo y sin validar: el catálogo admite
  /// fechas históricas y el sistema no es la autoridad sobre ellas.
  pub release_year: i32,

  /// Géneros asignados a la película. Es un conjunto: pertenecer dos veces
  /// al mismo género no significa nada.
  pub genres: HashSet<Genre>,

  /// Directores, en el orden en que aparecen en los créditos.
  pub directors: Vec<Person>,

  /// Guionistas, en el orden en que aparecen en los créditos.
  pub writers: Vec<Person>,
}

impl Movie {
  /// Devuelve la fecha de nacimiento del director más viejo de la película,
  /// o `None` si la película no tiene directores.
  ///
  /// Calcula la clave sin reordenar `directors`: las consultas nunca deben
  /// mutar las listas internas de una entidad.
  pub fn oldest_director_birthdate(&self) -> Option<NaiveDate> {
    self.directors.iter().map(|d| d.date_of_birth).min()
  }
}
