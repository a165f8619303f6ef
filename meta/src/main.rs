fn main() {
    multiversx_sc_meta_lib::cli_main::<basic_dao::AbiProvider>();
}
