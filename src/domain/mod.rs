mod category;
mod test_case;
mod validity;

pub use category::Category;
pub use test_case::TestCase;
pub use validity::Validity;
