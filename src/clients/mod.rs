pub mod rawg;
