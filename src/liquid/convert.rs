use liquid::model::Value as LiquidValue;
use serde_yaml::Value as YamlValue;

/// Convert YAML value to Liquid value
pub fn yaml_to_liquid(yaml: YamlValue) -> LiquidValue {
    match yaml {
        YamlValue::Null => LiquidValue::Nil,
        YamlValue::Bool(b) => LiquidValue::scalar(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                LiquidValue::scalar(i)
            } else if let Some(f) = n.as_f64() {
                LiquidValue::scalar(f)
            } else {
                LiquidValue::scalar(n.to_string())
            }
        }
        YamlValue::String(s) => LiquidValue::scalar(s),
        YamlValue::Sequence(seq) => {
            LiquidValue::Array(seq.into_iter().map(yaml_to_liquid).collect())
        }
        YamlValue::Mapping(map) => {
            let mut obj = liquid::Object::new();
            for (k, v) in map {
                let key = match k {
                    YamlValue::String(key) => key,
                    other => format!("{:?}", other),
                };
                obj.insert(key.into(), yaml_to_liquid(v));
            }
            LiquidValue::Object(obj)
        }
        YamlValue::Tagged(tagged) => yaml_to_liquid(tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_to_liquid() {
        let yaml: YamlValue = serde_yaml::from_str("name: Sam\ncount: 3\ntags: [a, b]\n").unwrap();
        let mut globals = liquid::Object::new();
        globals.insert("page".into(), yaml_to_liquid(yaml));

        let template = liquid::ParserBuilder::with_stdlib()
            .build()
            .unwrap()
            .parse("{{ page.name }} {{ page.count }} {{ page.tags | size }}")
            .unwrap();
        assert_eq!(template.render(&globals).unwrap(), "Sam 3 2");
    }
}
