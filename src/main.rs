#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    kotha_lipi_lib::run()
}
