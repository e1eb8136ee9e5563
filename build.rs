fn main() {
    println!("cargo::rustc-check-cfg=cfg(postgres_test)");
    println!("cargo::rerun-if-env-changed=DATABASE_URL");
    if std::env::var("DATABASE_URL").is_ok_and(|s| !s.is_empty()) {
        println!("cargo::rustc-cfg=postgres_test");
    }
}
