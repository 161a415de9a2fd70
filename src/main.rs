use std::error::Error;

use qrstamp::{encode_alphanumeric_bits, metadata::DATA_CODEWORDS, QRBuilder};

fn main() -> Result<(), Box<dyn Error>> {
    let message = std::env::args().nth(1).unwrap_or_else(|| "ABCDE123".to_string());

    let bits = encode_alphanumeric_bits(&message, DATA_CODEWORDS)?;
    println!("{bits}");
    println!("{:?}", bits.data());

    let qr = QRBuilder::new(&message).build()?;
    println!("{}", qr.to_str(1));

    qr.to_image(10).save("qr.png")?;

    Ok(())
}
