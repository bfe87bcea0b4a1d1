pub mod alert_dialog;
pub mod app;
pub mod auth_hooks;
pub mod city_filter;
pub mod form_field;
pub mod header;
pub mod home_screen;
pub mod hospital_card;
pub mod login_screen;
pub mod search_bar;
pub mod signup_screen;
