use std::env::args_os;

fn main() {
    docker_wsl::docker_compose().args(args_os().skip(1)).exit();
}
