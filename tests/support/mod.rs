pub mod mock_input;
pub mod rope_input;
