pub mod student;
pub mod tempat_pkl;

pub use student::Entity as Student;
pub use tempat_pkl::Entity as TempatPkl;
