use log::debug;

mod keys;

const DEMO_CAPACITY: u32 = 10;

fn main() {
    env_logger::init();
    for input in ["hello", "start"] {
        let key = keys::generate_key_str(input, DEMO_CAPACITY);
        debug!("key for {input} = {key}");
        println!("{key}");
    }
}
