mod digest_tests;
mod font_tests;
mod generator_tests;
