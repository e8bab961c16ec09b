pub mod synthetic_drawing;
