use std::env::args_os;

fn main() {
    docker_wsl::docker().args(args_os().skip(1)).exit();
}
