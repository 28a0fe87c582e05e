use crate::models::Block::{self, Spacer, Text, Warning};

pub(super) static BLOCKS: &[Block] = &[
    Text("1. Kill the process"),
    Block::bash("pkill -9 -f spades"),
    Block::bash("kill -9 103839"),
    Spacer,
    Text("2. Display all the list of created conda environments"),
    Block::bash("conda info --envs"),
    Spacer,
    Text("3. To check the content of the output.log file whether the bioinformatics pipeline is running in the background, you can execute the code below and exit using Ctrl + C"),
    Warning("Never press Ctrl + Z as it will stop the process instantly"),
    Block::bash("tail -f output.log"),
    // only lists jobs started from the current terminal
    Block::bash("jobs -l"),
    Block::bash("more output.log"),
    Block::bash("less output.log"),
    Block::bash("cat output.log"),
    Block::bash("head output.log"),
    Block::bash("ps aux | grep longstitch"),
    Block::bash("ps -p 83012"),
    Spacer,
    Text("4. To remove a conda environment that has been previously created"),
    Block::bash("conda env remove --name name_of_created_environment"),
    Spacer,
    Text("5. To check the version of the bioinformatics tools that you have downloaded within your conda environment"),
    Block::bash("conda list | grep spades"),
    Spacer,
    Text("6. Delete and clean all the files within the working directory"),
    Block::bash("rm -rf /path/to/your/directory/*"),
    Text("7. Remember to stop running the Docker desktop if you dont use it to save up CPU resources. Double check whether the Docker desktop already stops running in the background. After checking the status, exit by running 'q'."),
    Block::bash("systemctl --user stop docker-desktop"),
    Block::bash("systemctl --user status docker-desktop"),
    Block::bash("q"),
];
