pub mod app;

pub use app::{
    TEST_JWT_SECRET, admin_token, empty_request, get_json_body, json_request, make_test_app,
    user_token,
};
