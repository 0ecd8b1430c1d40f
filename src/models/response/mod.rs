pub mod api_msg;
