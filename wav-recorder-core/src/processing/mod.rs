pub mod accumulator;
pub mod wav_encoder;
