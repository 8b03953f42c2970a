//! # 문자열 유틸리티
//!
//! 부분 업데이트 페이로드를 다루기 위한 공통 문자열 함수들입니다.
//! 빈 문자열(또는 공백만 있는 문자열)은 "값이 제공되지 않음"으로 취급합니다.

use serde::Deserialize;

/// 공백뿐인 값을 `None`으로 바꿉니다. 값이 있으면 원본을 그대로 유지합니다.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|s| is_present(s))
}

pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `Option<String>` 필드용 serde 헬퍼. 누락, `null`, 빈 문자열을 모두 `None`으로 읽습니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(blank_to_none(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_to_none() {
        assert_eq!(blank_to_none(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(blank_to_none(Some(" padded ".to_string())), Some(" padded ".to_string()));
        assert_eq!(blank_to_none(Some("".to_string())), None);
        assert_eq!(blank_to_none(Some("   ".to_string())), None);
        assert_eq!(blank_to_none(None), None);
    }

    #[test]
    fn test_is_present() {
        assert!(is_present("Hello"));
        assert!(!is_present(""));
        assert!(!is_present("\t\n"));
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "Hello"}"#).unwrap();
        assert_eq!(result.optional_field, Some("Hello".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": ""}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);
    }
}
