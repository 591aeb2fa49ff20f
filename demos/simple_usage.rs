/// Viseg tokenizer demo
///
/// Demonstrates the full pull protocol:
/// - reset with a document
/// - draining tokens with offsets and position increments
/// - end-of-stream finalization
/// - reusing the same instance for a second document

use viseg::analysis::tokenizer::VietnameseTokenizer;
use viseg::core::config::TokenizerConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Viseg - Vietnamese Tokenizer Demo\n");

    // Step 1: Default engine (syllable splitting, sentence detection on)
    println!("Step 1: Default engine");
    let mut tokenizer = VietnameseTokenizer::new();
    print_tokens(&mut tokenizer, "Ông Phan Mạnh Thắng, bộ trưởng bộ ngoại giao.")?;

    // Step 2: Reuse the same instance for another document
    println!("Step 2: Reuse for a second document");
    print_tokens(&mut tokenizer, "Hà Nội ngày 21 tháng 8.")?;

    // Step 3: Dictionary engine joining compounds
    println!("Step 3: Ambiguity resolution (compound joining)");
    let config = TokenizerConfig::default().with_ambiguity_resolution(true);
    let mut resolving = VietnameseTokenizer::with_config(config);
    print_tokens(&mut resolving, "bộ trưởng bộ ngoại giao Việt Nam")?;

    Ok(())
}

fn print_tokens(
    tokenizer: &mut VietnameseTokenizer,
    text: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("  Input: {text}");
    tokenizer.reset(text.as_bytes())?;
    while let Some(token) = tokenizer.next_token() {
        println!(
            "    [{:>2}..{:<2}] +{} {:<10} {}",
            token.start_offset,
            token.end_offset,
            token.position_increment,
            token.token_type,
            token.text
        );
    }
    let finish = tokenizer.end()?;
    println!(
        "    end: offset {} (+{} trailing)\n",
        finish.offset, finish.position_increment
    );
    Ok(())
}
