mod check;
mod help;
mod utils;
