pub mod d404_labour_summary;
