mod dialogs;
mod histogram;
mod image_view;
mod main;
mod toolbar;
