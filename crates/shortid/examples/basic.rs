use shortid::{ShortIdGenerator, encode_base58, encode_base64};

fn main() -> Result<(), shortid::Error> {
    let generator = ShortIdGenerator::new(0, "", "")?;

    for _ in 0..5 {
        let id = generator.generate();
        println!("Raw    : {id}");
        println!("Base64 : {}", encode_base64(&id));
        println!("Base58 : {}", encode_base58(&id));
        println!("-----------");
    }

    Ok(())
}
