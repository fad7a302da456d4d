mod donation_progress_tests;
mod home_tests;
