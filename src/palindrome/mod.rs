// src/palindrome/mod.rs

pub mod palindrome_table;

pub use palindrome_table::{generate_palindromes, generate_palindromes_in_digit, PalindromeTable};
