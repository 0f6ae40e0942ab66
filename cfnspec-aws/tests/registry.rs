//! Corpus-wide integration tests
//!
//! Properties that must hold across every schema in the corpus, not just
//! the per-module checks living next to each resource definition.

use std::collections::HashSet;

use cfnspec_aws::{all_schemas, registry};
use cfnspec_core::value::{Intrinsic, Value};

#[test]
fn corpus_size() {
    assert_eq!(all_schemas().len(), 15);
    assert_eq!(registry().len(), 15);
}

#[test]
fn type_names_unique_and_well_formed() {
    let mut seen = HashSet::new();
    for schema in all_schemas() {
        let parts: Vec<&str> = schema.type_name.split("::").collect();
        assert_eq!(
            parts.len(),
            3,
            "{} is not of the form AWS::Service::Resource",
            schema.type_name
        );
        assert_eq!(parts[0], "AWS", "{} has a bad vendor prefix", schema.type_name);
        assert!(!parts[1].is_empty() && !parts[2].is_empty());
        assert!(
            seen.insert(schema.type_name.clone()),
            "duplicate type name {}",
            schema.type_name
        );
    }
}

#[test]
fn no_dangling_bag_references() {
    for schema in all_schemas() {
        if let Err(errors) = schema.check_integrity() {
            panic!("{}: {:?}", schema.type_name, errors);
        }
    }
}

#[test]
fn every_property_accepts_an_intrinsic() {
    let reference = Value::Intrinsic(Box::new(Intrinsic::Ref("SomeResource".to_string())));
    for schema in all_schemas() {
        for prop in schema.properties.values() {
            assert!(
                prop.prop_type
                    .validate(&reference, &schema.property_bags)
                    .is_ok(),
                "{}.{} rejected an intrinsic",
                schema.type_name,
                prop.name
            );
        }
        for bag in schema.property_bags.values() {
            for prop in bag.properties.values() {
                assert!(
                    prop.prop_type
                        .validate(&reference, &schema.property_bags)
                        .is_ok(),
                    "{}.{}.{} rejected an intrinsic",
                    schema.type_name,
                    bag.name,
                    prop.name
                );
            }
        }
    }
}

#[test]
fn every_schema_is_documented() {
    for schema in all_schemas() {
        assert!(
            schema.description.is_some(),
            "{} has no description",
            schema.type_name
        );
        let docs = schema
            .documentation
            .as_deref()
            .unwrap_or_else(|| panic!("{} has no documentation link", schema.type_name));
        assert!(
            docs.starts_with("https://docs.aws.amazon.com/"),
            "{} links outside the AWS docs: {}",
            schema.type_name,
            docs
        );
    }
}

#[test]
fn registry_lookup_by_type_name() {
    let registry = registry();
    let sg = registry
        .lookup("AWS::EC2::SecurityGroup")
        .expect("security group schema registered");
    assert_eq!(sg.service(), "EC2");
    assert_eq!(sg.resource(), "SecurityGroup");
    assert!(registry.lookup("AWS::EC2::DoesNotExist").is_none());
}

#[test]
fn security_group_requiredness() {
    let registry = registry();
    let sg = registry.lookup("AWS::EC2::SecurityGroup").unwrap();
    assert!(sg.properties["GroupDescription"].required);
    assert!(!sg.properties["VpcId"].required);
}
