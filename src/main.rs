// Wisp — frameless browser shell.
// One window hosts two child webviews: the URL bar document on the bottom
// layer and the embedded content view above it. The bar is summoned with a
// global shortcut and dismissed by Escape or a completed navigation.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    wisp_lib::run()
}
