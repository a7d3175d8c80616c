use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::{Genre, Movie, Person};
use crate::errors::CoreError;

/// Servicio de consulta sobre un catálogo de películas en memoria.
///
/// Todas las operaciones son de solo lectura: ninguna muta las entidades
/// ni el orden de la secuencia recibida. Las vistas ordenadas o filtradas
/// devuelven siempre un `Vec` nuevo.
///
/// El servicio puede trabajar sobre dos modos de propiedad:
/// - [`MovieQueryService::new`] toma prestada la secuencia y actúa como
///   *vista viva*: los cambios que el dueño haga entre consultas son
///   visibles en las consultas siguientes.
/// - [`MovieQueryService::snapshot`] toma posesión de una copia, para
///   quien prefiera semántica de instantánea.
pub struct MovieQueryService<'a> {
  movies: Cow<'a, [Movie]>,
}

impl<'a> MovieQueryService<'a> {
  /// Crea una vista viva sobre la secuencia prestada.
  pub fn new(movies: &'a [Movie]) -> Self {
    MovieQueryService { movies: Cow::Borrowed(movies) }
  }

  /// Crea un servicio dueño de su propia copia del catálogo.
  pub fn snapshot(movies: Vec<Movie>) -> MovieQueryService<'static> {
    MovieQueryService { movies: Cow::Owned(movies) }
  }

  /// `true` si *todas* las películas del catálogo tienen el género dado.
  /// Con el catálogo vacío es trivialmente `true`.
  pub fn all_have_genre(&self, genre: &Genre) -> bool {
    self.movies.iter().all(|movie| movie.genres.contains(genre))
  }

  /// `true` si *alguna* película del catálogo tiene el género dado.
  /// Con el catálogo vacío es `false`.
  pub fn any_has_genre(&self, genre: &Genre) -> bool {
    self.movies.iter().any(|movie| movie.genres.contains(genre))
  }

  /// `true` si la persona aparece como director de alguna película.
  /// Compara por valor (nombre + fecha de nacimiento).
  pub fn is_directed_by(&self, person: &Person) -> bool {
    self.movies.iter().flat_map(|movie| movie.directors.iter()).any(|d| d == person)
  }

  /// Suma de las duraciones de todas las películas, en minutos.
  pub fn total_length(&self) -> u64 {
    self.movies.iter().map(|movie| u64::from(movie.length)).sum()
  }

  /// Cuántas películas duran *estrictamente* más que `minutes`.
  pub fn count_longer_than(&self, minutes: u32) -> usize {
    self.movies.iter().filter(|movie| movie.length > minutes).count()
  }

  /// Todos los guionistas del catálogo, sin repetidos, en orden de primera
  /// aparición (recorriendo las películas en orden de entrada).
  pub fn distinct_writers(&self) -> Vec<Person> {
    let mut seen = HashSet::new();
    let mut writers = Vec::new();
    for writer in self.movies.iter().flat_map(|movie| movie.writers.iter()) {
      if seen.insert(writer) {
        writers.push(writer.clone());
      }
    }
    writers
  }

  /// Títulos de las películas en cuyo guion participó la persona,
  /// comparando por nombre.
  ///
  /// Cada película que coincide aporta su título una vez, en orden de
  /// entrada. No se eliminan títulos repetidos entre películas distintas.
  pub fn titles_written_by(&self, person: &Person) -> Vec<String> {
    self
      .movies
      .iter()
      .filter(|movie| movie.writers.iter().any(|w| w.name == person.name))
      .map(|movie| movie.title.clone())
      .collect()
  }

  /// Duraciones de todas las películas, en orden de entrada.
  pub fn all_lengths(&self) -> Vec<u32> {
    self.movies.iter().map(|movie| movie.length).collect()
  }

  /// La película más larga del catálogo.
  ///
  /// En caso de empate devuelve la primera en orden de entrada. El fold
  /// solo reemplaza al candidato con una duración estrictamente mayor;
  /// `Iterator::max_by_key` se quedaría con el *último* máximo.
  pub fn longest_movie(&self) -> Result<&Movie, CoreError> {
    self
      .movies
      .iter()
      .fold(None, |best: Option<&Movie>, movie| match best {
        Some(b) if b.length >= movie.length => Some(b),
        _ => Some(movie),
      })
      .ok_or(CoreError::EmptyCatalog)
  }

  /// La película con el año de estreno más antiguo.
  ///
  /// En caso de empate devuelve la primera en orden de entrada
  /// (`min_by_key` conserva el primer mínimo).
  pub fn oldest_movie(&self) -> Result<&Movie, CoreError> {
    self.movies.iter().min_by_key(|movie| movie.release_year).ok_or(CoreError::EmptyCatalog)
  }

  /// Catálogo ordenado por año de estreno ascendente.
  ///
  /// Orden estable: los empates conservan el orden de entrada.
  pub fn by_release_year(&self) -> Vec<Movie> {
    let mut sorted = self.movies.to_vec();
    sorted.sort_by_key(|movie| movie.release_year);
    sorted
  }

  /// Catálogo ordenado por la fecha de nacimiento del director más viejo
  /// de cada película, ascendente.
  ///
  /// Una película sin directores no tiene clave definida y se ordena al
  /// final. Orden estable. La clave se deriva con
  /// [`Movie::oldest_director_birthdate`]; las listas de créditos de las
  /// entidades no se tocan.
  pub fn by_oldest_director_birthdate(&self) -> Vec<Movie> {
    let mut sorted = self.movies.to_vec();
    sorted.sort_by(|a, b| match (a.oldest_director_birthdate(), b.oldest_director_birthdate()) {
      (Some(a), Some(b)) => a.cmp(&b),
      (Some(_), None) => Ordering::Less,
      (None, Some(_)) => Ordering::Greater,
      (None, None) => Ordering::Equal,
    });
    sorted
  }

  /// Películas estrenadas en `release_year` o antes, en orden de entrada.
  pub fn released_no_later_than(&self, release_year: i32) -> Vec<Movie> {
    self.movies.iter().filter(|movie| movie.release_year <= release_year).cloned().collect()
  }
}
