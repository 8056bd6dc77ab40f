//! Golden snapshots of the generated class IR.
//!
//! Review changes with `cargo insta review`.

use prefsmith::Codegen;
use prefsmith::frontend::Manifest;

const FLAGS: &str = r#"{
  "types": [
    {
      "name": "Flags",
      "qualified_name": "app::Flags",
      "kind": "interface",
      "generate": true,
      "methods": [
        { "name": "isBeta", "return_type": "bool", "is_abstract": true, "property": { "key": "beta", "defValue": "true" } },
        { "name": "getNames", "return_type": "Set<String>", "is_abstract": true, "property": { "key": "names" } }
      ]
    }
  ]
}"#;

fn render(manifest: &str, name: &str) -> String {
    let manifest = Manifest::from_json(manifest).unwrap();
    let universe = manifest.universe();
    let spec = Codegen::default()
        .generate_spec(universe.get(name).unwrap(), &universe)
        .unwrap();
    spec.to_string()
}

#[test]
fn interface_with_a_set_property() {
    insta::assert_snapshot!(render(FLAGS, "app::Flags"), @r#"
    class FlagsImpl implements app::Flags {
        private final beta: bool
        private final names: HashSet<String>

        public new(beta: bool, @NonNull names: HashSet<String>) {
            this.beta = beta
            this.names = FrozenSet::copy_of(names)
        }

        @Override
        public equals(object: Any) -> bool {
            if this == object {
                return true
            }
            if !(object instanceof app::Flags) {
                return false
            }
            let that = object as app::Flags
            return this.beta == that.isBeta() && this.names == that.getNames()
        }

        @Override
        public hashCode() -> i32 {
            return hash_fold(17, 37, [this.beta, this.names])
        }

        @Override
        public toString() -> String {
            return describe("Flags", beta=this.beta, names=this.names)
        }

        @Override
        public isBeta() -> bool {
            return this.beta
        }

        @Override
        public getNames() -> HashSet<String> {
            return FrozenSet::copy_of(this.names)
        }

        public static load(@NonNull store: Store) -> Self {
            return new(store.get_bool("beta", "true"), store.get_string_set("names"))
        }

        public save(@NonNull store: Store) -> () {
            store.put_bool("beta", this.beta)
            store.put_string_set("names", this.names)
        }
    }
    "#);
}

#[test]
fn empty_interface_hashes_to_the_seed() {
    let manifest = r#"{ "types": [ { "name": "Empty", "qualified_name": "app::Empty", "kind": "interface", "generate": true } ] }"#;
    let rendered = render(manifest, "app::Empty");
    assert!(rendered.contains("return hash_fold(17, 37, [])"), "{}", rendered);
    assert!(rendered.contains("return true\n"), "{}", rendered);
    assert!(rendered.contains("return describe(\"Empty\", )"), "{}", rendered);
}
