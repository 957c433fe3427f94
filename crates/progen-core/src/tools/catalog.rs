//! Catalog of tool requirements used by the project generators.
//!
//! One constructor per external tool, carrying its per-OS package-manager
//! commands and manual download links.

use super::manager::PackageManager::{Apt, Brew, Choco, Dnf, Pacman, Scoop, Winget, Yum};
use super::spec::{InstallSpec, ToolSpec};

pub fn gcc() -> ToolSpec {
    ToolSpec::new("gcc", "gcc --version")
        .windows(
            InstallSpec::new()
                .link("https://osdn.net/projects/mingw/releases/")
                .manager(Scoop, "scoop install gcc")
                .manager(Choco, "choco install mingw"),
        )
        .macos(
            InstallSpec::new()
                .link("https://apps.apple.com/us/app/xcode/id497799835?mt=12")
                .manager(Brew, "brew install gcc"),
        )
        .linux(
            InstallSpec::new()
                .manager(Apt, "sudo apt-get install build-essential")
                .manager(Dnf, "sudo dnf install gcc")
                .manager(Yum, "sudo yum install gcc")
                .manager(Pacman, "sudo pacman -S gcc"),
        )
}

pub fn gxx() -> ToolSpec {
    ToolSpec::new("g++", "g++ --version")
        .windows(
            InstallSpec::new()
                .link("https://osdn.net/projects/mingw/releases/")
                .manager(Scoop, "scoop install gcc")
                .manager(Choco, "choco install mingw"),
        )
        .macos(
            InstallSpec::new()
                .link("https://apps.apple.com/us/app/xcode/id497799835?mt=12")
                .manager(Brew, "brew install gcc"),
        )
        .linux(
            InstallSpec::new()
                .manager(Apt, "sudo apt-get install build-essential")
                .manager(Dnf, "sudo dnf install gcc-c++")
                .manager(Yum, "sudo yum install gcc-c++")
                .manager(Pacman, "sudo pacman -S gcc"),
        )
}

pub fn git() -> ToolSpec {
    ToolSpec::new("git", "git --version")
        .windows(
            InstallSpec::new()
                .link("https://git-scm.com/download/win")
                .manager(Winget, "winget install Git.Git")
                .manager(Scoop, "scoop install git")
                .manager(Choco, "choco install git"),
        )
        .macos(
            InstallSpec::new()
                .link("https://git-scm.com/download/mac")
                .manager(Brew, "brew install git"),
        )
        .linux(
            InstallSpec::new()
                .link("https://git-scm.com/download/linux")
                .manager(Apt, "sudo apt-get install git")
                .manager(Dnf, "sudo dnf install git")
                .manager(Yum, "sudo yum install git")
                .manager(Pacman, "sudo pacman -S git"),
        )
}

pub fn go() -> ToolSpec {
    ToolSpec::new("go", "go version")
        .windows(
            InstallSpec::new()
                .link("https://golang.org/dl/")
                .manager(Winget, "winget install Golang.Go")
                .manager(Scoop, "scoop install go")
                .manager(Choco, "choco install golang"),
        )
        .macos(
            InstallSpec::new()
                .link("https://golang.org/dl/")
                .manager(Brew, "brew install go"),
        )
        .linux(InstallSpec::new().link("https://golang.org/dl/"))
}

fn node_spec(name: &'static str, probe: &str) -> ToolSpec {
    ToolSpec::new(name, probe)
        .windows(
            InstallSpec::new()
                .link("https://nodejs.org/en/")
                .manager(Winget, "winget install OpenJS.NodeJS")
                .manager(Scoop, "scoop install nodejs")
                .manager(Choco, "choco install nodejs"),
        )
        .macos(
            InstallSpec::new()
                .link("https://nodejs.org/en/")
                .manager(Brew, "brew install node"),
        )
        .linux(
            InstallSpec::new()
                .link("https://nodejs.org/en/")
                .manager(Apt, "sudo apt-get install nodejs npm")
                .manager(Dnf, "sudo dnf install nodejs")
                .manager(Yum, "sudo yum install nodejs12")
                .manager(Pacman, "sudo pacman -S nodejs npm"),
        )
}

pub fn npm() -> ToolSpec {
    node_spec("npm", "npm --version")
}

pub fn npx() -> ToolSpec {
    node_spec("npx", "npx --version")
}

pub fn java() -> ToolSpec {
    ToolSpec::new("java", "java --version")
        .windows(
            InstallSpec::new()
                .link("https://www.java.com/en/download/")
                .manager(Choco, "choco install javaruntime"),
        )
        .macos(
            InstallSpec::new()
                .link("https://www.java.com/en/download/")
                .manager(Brew, "brew install java"),
        )
        .linux(
            InstallSpec::new()
                .link("https://www.java.com/en/download/")
                .manager(Apt, "sudo apt-get install default-jre")
                .manager(Dnf, "sudo dnf install java-latest-openjdk-devel.x86_64")
                .manager(Yum, "sudo yum install java-11-openjdk-devel")
                .manager(Pacman, "sudo pacman -S java"),
        )
}

pub fn javac() -> ToolSpec {
    ToolSpec::new("javac", "javac --version")
        .windows(
            InstallSpec::new()
                .link("https://www.oracle.com/java/technologies/javase-downloads.html")
                .manager(Choco, "choco install openjdk.portable"),
        )
        .macos(
            InstallSpec::new()
                .link("https://www.oracle.com/java/technologies/javase-downloads.html")
                .manager(Brew, "brew install openjdk"),
        )
        .linux(
            InstallSpec::new()
                .link("https://www.oracle.com/java/technologies/javase-downloads.html")
                .manager(Apt, "sudo apt-get install default-jdk")
                .manager(Dnf, "sudo dnf install java-latest-openjdk-devel.x86_64")
                .manager(Yum, "sudo yum install java-1.8.0-openjdk-devel")
                .manager(Pacman, "sudo pacman -S jdk-openjdk"),
        )
}

pub fn maven() -> ToolSpec {
    ToolSpec::new("mvn", "mvn --version")
        .windows(
            InstallSpec::new()
                .link("https://maven.apache.org/download.cgi")
                .manager(Scoop, "scoop install maven")
                .manager(Choco, "choco install maven"),
        )
        .macos(
            InstallSpec::new()
                .link("https://maven.apache.org/download.cgi")
                .manager(Brew, "brew install maven"),
        )
        .linux(
            InstallSpec::new()
                .link("https://maven.apache.org/download.cgi")
                .manager(Apt, "sudo apt-get install maven")
                .manager(Dnf, "sudo dnf install maven")
                .manager(Yum, "sudo yum install maven")
                .manager(Pacman, "sudo pacman -S maven"),
        )
}

pub fn ant() -> ToolSpec {
    ToolSpec::new("ant", "ant --version")
        .windows(
            InstallSpec::new()
                .link("https://ant.apache.org/bindownload.cgi")
                .manager(Scoop, "scoop install ant")
                .manager(Choco, "choco install ant"),
        )
        .macos(
            InstallSpec::new()
                .link("https://ant.apache.org/bindownload.cgi")
                .manager(Brew, "brew install ant"),
        )
        .linux(
            InstallSpec::new()
                .link("https://ant.apache.org/bindownload.cgi")
                .manager(Apt, "sudo apt-get install ant"),
        )
}

pub fn php() -> ToolSpec {
    ToolSpec::new("php", "php --version")
        .windows(
            InstallSpec::new()
                .link("https://windows.php.net/download")
                .manager(Scoop, "scoop install php")
                .manager(Choco, "choco install php"),
        )
        .macos(
            InstallSpec::new()
                .link("https://www.php.net/downloads")
                .shell("curl -s http://php-osx.liip.ch/install.sh | bash -s 7.3")
                .manager(Brew, "brew install php"),
        )
        .linux(
            InstallSpec::new()
                .link("https://www.php.net/downloads")
                .manager(Apt, "sudo apt install php libapache2-mod-php")
                .manager(Dnf, "sudo dnf install php-cli")
                .manager(Yum, "sudo yum install php php-cli")
                .manager(Pacman, "sudo pacman -S php"),
        )
}

fn python_spec(name: &'static str, probe: &str) -> ToolSpec {
    ToolSpec::new(name, probe)
        .windows(
            InstallSpec::new()
                .link("https://www.python.org/downloads/")
                .manager(Winget, "winget install Python.Python")
                .manager(Scoop, "scoop install python")
                .manager(Choco, "choco install python pip"),
        )
        .macos(
            InstallSpec::new()
                .link("https://www.python.org/downloads/")
                .manager(Brew, "brew install python3"),
        )
        .linux(
            InstallSpec::new()
                .manager(Apt, "sudo apt-get install -y python3-dev python3-pip")
                .manager(Dnf, "sudo dnf install python3 python3-virtualenv")
                .manager(Yum, "sudo yum install -y python3-devel.x86_64 python-pip")
                .manager(
                    Pacman,
                    "sudo pacman -S python3 python-pip python-virtualenv python-pipenv",
                ),
        )
}

/// The interpreter is `python` on Windows and `python3` elsewhere.
pub fn python(windows_host: bool) -> ToolSpec {
    if windows_host {
        python_spec("python", "python --version")
    } else {
        python_spec("python3", "python3 --version")
    }
}

pub fn pip(windows_host: bool) -> ToolSpec {
    if windows_host {
        python_spec("pip", "pip --version")
    } else {
        python_spec("pip3", "pip3 --version")
    }
}

pub fn pipenv() -> ToolSpec {
    ToolSpec::new("pipenv", "pipenv -h")
        .windows(InstallSpec::new().shell("python -m pip install pipenv"))
        .macos(
            InstallSpec::new()
                .shell("python3 -m pip install pipenv")
                .manager(Brew, "brew install pipenv"),
        )
        .linux(
            InstallSpec::new()
                .shell("sudo pip3 install pipenv")
                .manager(Pacman, "sudo pacman -S python-pipenv"),
        )
        .update_package_manager(false)
}

pub fn deno() -> ToolSpec {
    ToolSpec::new("deno", "deno --version")
        .windows(
            InstallSpec::new()
                .link("https://deno.land/")
                .shell("powershell.exe -command \"iwr https://deno.land/x/install/install.ps1 -useb | iex\"")
                .manager(Scoop, "scoop install deno")
                .manager(Choco, "choco install deno"),
        )
        .macos(
            InstallSpec::new()
                .link("https://deno.land/")
                .shell("curl -fsSL https://deno.land/x/install/install.sh | sh")
                .manager(Brew, "brew install unzip deno"),
        )
        .linux(
            InstallSpec::new()
                .link("https://deno.land/")
                .shell("curl -fsSL https://deno.land/x/install/install.sh | sh"),
        )
}

pub fn flutter() -> ToolSpec {
    ToolSpec::new("flutter", "flutter --version")
        .windows(
            InstallSpec::new()
                .link("https://flutter.dev/docs/get-started/install/windows")
                .manager(Scoop, "scoop install flutter")
                .manager(Choco, "choco install flutter"),
        )
        .macos(InstallSpec::new().link("https://flutter.dev/docs/get-started/install/macos"))
        .linux(InstallSpec::new().link("https://flutter.dev/docs/get-started/install/linux"))
}

pub fn ghc() -> ToolSpec {
    ToolSpec::new("ghc", "ghc --version")
        .windows(
            InstallSpec::new()
                .link("https://get.haskellstack.org/stable/windows-x86_64-installer.exe")
                .manager(Winget, "winget install commercialstack.stack")
                .manager(Scoop, "scoop install haskell")
                .manager(Choco, "choco install haskell-dev"),
        )
        .macos(
            InstallSpec::new()
                .link("https://www.haskell.org/platform/#osx")
                .shell("curl -sSL https://get.haskellstack.org/ | sh")
                .manager(Brew, "brew install ghc"),
        )
        .linux(
            InstallSpec::new()
                .link("https://www.haskell.org/platform/#linux-source")
                .shell("curl -sSL https://get.haskellstack.org/ | sh")
                .manager(Apt, "sudo apt-get install haskell-platform")
                .manager(Dnf, "sudo dnf install haskell-platform")
                .manager(Yum, "sudo yum install haskell-platform"),
        )
}

pub fn tsc() -> ToolSpec {
    ToolSpec::new("tsc", "tsc --version")
        .windows(
            InstallSpec::new()
                .shell("npm install -g typescript")
                .manager(Choco, "choco install typescript"),
        )
        .macos(
            InstallSpec::new()
                .shell("npm install -g typescript")
                .manager(Brew, "brew install typescript"),
        )
        .linux(InstallSpec::new().shell("npm install -g typescript"))
}
