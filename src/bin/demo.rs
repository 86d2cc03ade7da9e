// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Packaging demo: prints the result of the example addition.

fn main() {
    println!("{}", commitgate::example::demo_line());
}
