use chrono::NaiveDate;
use filmoteca_core::domain::{Genre, Movie, Person};
use filmoteca_core::services::MovieQueryService;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("invalid fixture date")
}

fn main() {
  let kurosawa = Person::new("Akira Kurosawa", date(1910, 3, 23));
  let nolan = Person::new("Christopher Nolan", date(1970, 7, 30));
  let miyazaki = Person::new("Hayao Miyazaki", date(1941, 1, 5));

  let movies = vec![
    Movie {
      title: "Seven Samurai".to_string(),
      length: 207,
      release_year: 1954,
      genres: [Genre::Action, Genre::Drama].into_iter().collect(),
      directors: vec![kurosawa.clone()],
      writers: vec![kurosawa],
    },
    Movie {
      title: "Spirited Away".to_string(),
      length: 125,
      release_year: 2001,
      genres: [Genre::Animation, Genre::Fantasy].into_iter().collect(),
      directors: vec![miyazaki.clone()],
      writers: vec![miyazaki],
    },
    Movie {
      title: "Interstellar".to_string(),
      length: 169,
      release_year: 2014,
      genres: [Genre::SciFi, Genre::Drama].into_iter().collect(),
      directors: vec![nolan.clone()],
      writers: vec![nolan.clone()],
    },
  ];

  let queries = MovieQueryService::new(&movies);

  println!("total length          = {} min", queries.total_length());
  println!("longer than 150 min   = {}", queries.count_longer_than(150));
  println!("any drama?            = {}", queries.any_has_genre(&Genre::Drama));
  println!("all drama?            = {}", queries.all_have_genre(&Genre::Drama));
  println!("directed by Nolan?    = {}", queries.is_directed_by(&nolan));

  let longest = queries.longest_movie().expect("catalog is not empty");
  let oldest = queries.oldest_movie().expect("catalog is not empty");
  println!("longest movie         = {} ({} min)", longest.title, longest.length);
  println!("oldest movie          = {} ({})", oldest.title, oldest.release_year);

  println!("writers               = {:?}", queries.distinct_writers());
  println!("written by Nolan      = {:?}", queries.titles_written_by(&nolan));

  println!("by release year:");
  for movie in queries.by_release_year() {
    println!("  {} - {}", movie.release_year, movie.title);
  }

  println!("by oldest director birthdate:");
  for movie in queries.by_oldest_director_birthdate() {
    let birthdate = movie.oldest_director_birthdate().expect("fixtures have directors");
    println!("  {} - {}", birthdate, movie.title);
  }

  let early: Vec<String> =
    queries.released_no_later_than(2001).into_iter().map(|m| m.title).collect();
  println!("released <= 2001      = {early:?}");
}
