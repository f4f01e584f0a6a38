mod load_dotenv;
mod time;

pub use load_dotenv::load_dotenv;
pub use time::now_epoch;

pub mod base_path;

use rand::RngCore;

pub fn rand_hex(bytes: usize) -> String {
    let mut rand = vec![0u8; bytes];
    rand::thread_rng().fill_bytes(&mut rand);
    hex::encode(rand)
}
