pub mod youtube_block;
