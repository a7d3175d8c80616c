pub mod genre;
pub mod movie;
pub mod person;

pub use genre::Genre;
pub use movie::Movie;
pub use person::Person;
