use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Representa los géneros cinematográficos principales utilizados dentro del sistema.
///
/// Este listado refleja categorías amplias de clasificación, al estilo de las
/// taxonomías de IMDb o TMDB. Se usa como etiqueta de una [`crate::domain::Movie`];
/// una película puede pertenecer a varios géneros a la vez.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
  Action,
  Adventure,
  Animation,
  Comedy,
  Crime,
  Documentary,
  Drama,
  Fantasy,
  Horror,
  Musical,
  Mystery,
  Romance,
  SciFi,
  Thriller,
  War,
  Western,
}

impl fmt::Display for Genre {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      Genre::Action => "Action",
      Genre::Adventure => "Adventure",
      Genre::Animation => "Animation",
      Genre::Comedy => "Comedy",
      Genre::Crime => "Crime",
      Genre::Documentary => "Documentary",
      Genre::Drama => "Drama",
      Genre::Fantasy => "Fantasy",
      Genre::Horror => "Horror",
      Genre::Musical => "Musical",
      Genre::Mystery => "Mystery",
      Genre::Romance => "Romance",
      Genre::SciFi => "Sci-Fi",
      Genre::Thriller => "Thriller",
      Genre::War => "War",
      Genre::Western => "Western",
    };
    write!(f, "{}", text)
  }
}

/// Error producido cuando una cadena no puede convertirse en [`Genre`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid genre: {input}")]
pub struct GenreParseError {
  pub input: String,
}

impl FromStr for Genre {
  type Err = GenreParseError;

  /// Intenta convertir una cadena en un [`Genre`].
  ///
  /// Normaliza la cadena eliminando espacios, guiones y separadores comunes.
  /// Si la cadena no coincide con ningún género conocido, se devuelve un error.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_lowercase().replace(['-', ' ', ',', '&', '/'], "");

    let genre = match normalized.as_str() {
      "action" => Genre::Action,
      "adventure" => Genre::Adventure,
      "animation" => Genre::Animation,
      "comedy" => Genre::Comedy,
      "crime" => Genre::Crime,
      "documentary" => Genre::Documentary,
      "drama" => Genre::Drama,
      "fantasy" => Genre::Fantasy,
      "horror" => Genre::Horror,
      "musical" => Genre::Musical,
      "mystery" => Genre::Mystery,
      "romance" => Genre::Romance,
      "scifi" | "sciencefiction" => Genre::SciFi,
      "thriller" => Genre::Thriller,
      "war" => Genre::War,
      "western" => Genre::Western,
      _ => return Err(GenreParseError { input: s.to_string() }),
    };

    Ok(genre)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_normalizes_separators_and_case() {
    assert_eq!("Sci-Fi".parse::<Genre>().unwrap(), Genre::SciFi);
    assert_eq!("science fiction".parse::<Genre>().unwrap(), Genre::SciFi);
    assert_eq!("  DRAMA ".parse::<Genre>().unwrap(), Genre::Drama);
  }

  #[test]
  fn test_parse_rejects_unknown_genre() {
    let err = "telenovela".parse::<Genre>().unwrap_err();
    assert_eq!(err.input, "telenovela");
  }

  #[test]
  fn test_display_round_trips() {
    let genre = Genre::Western;
    assert_eq!(genre.to_string().parse::<Genre>().unwrap(), genre);
  }
}
