use rand::Rng;

const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// 生成指定长度的随机大写字母数字串（去除易混淆字符）
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 生成缴费凭证号，如 PAY-8F3K2M9QLW
pub fn generate_payment_reference() -> String {
    format!("PAY-{}", generate_code(10))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_code_length_and_charset() {
        let code = generate_code(12);
        assert_eq!(code.len(), 12);
        assert!(code.bytes().all(|b| CHARSET.contains(&b)));
    }

    #[test]
    fn test_payment_reference_prefix() {
        let reference = generate_payment_reference();
        assert!(reference.starts_with("PAY-"));
        assert_eq!(reference.len(), 14);
    }
}
