mod repo;

pub use self::repo::Repo;
