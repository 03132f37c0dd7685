pub mod m202507010001_create_tempat_pkl;
pub mod m202507010002_create_students;
