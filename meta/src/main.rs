fn main() {
    multiversx_sc_meta_lib::cli_main::<blink_galaxy::AbiProvider>();
}
